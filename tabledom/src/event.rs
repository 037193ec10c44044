/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click event, targeted at the deepest element under the pointer
    Click {
        target: Option<String>,
        button: MouseButton,
    },
    /// A subtree was inserted under the given parent after initial setup
    Inserted { parent: String },
}

impl Event {
    /// Primary-button click on the element with the given ID.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
