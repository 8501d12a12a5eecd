//! Modal overlays and the stack that orders them
//!
//! Exactly one overlay receives input at a time: the top of the stack.
//! An empty stack means keys go to the active screen.

/// An overlay drawn over the active screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Purpose filter dialog on the Builds screen
    PurposeFilter { selected_index: usize },
    /// Name prompt when saving the current configuration
    SaveBuild { name: String },
    /// Help dialog showing all keyboard shortcuts
    Help { scroll_offset: usize },
}

/// LIFO stack of overlays; closing one reveals whatever was under it
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// The overlay currently receiving input, if any
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Mutable access to the top overlay, for inline text editing
    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_follows_push_and_pop() {
        let mut modals = ModalStack::default();
        assert!(modals.is_empty());
        assert_eq!(modals.top(), None);

        modals.push(Modal::QuitConfirm);
        modals.push(Modal::Help { scroll_offset: 0 });
        assert_eq!(modals.top(), Some(&Modal::Help { scroll_offset: 0 }));

        // Closing the help reveals the quit confirm underneath
        assert_eq!(modals.pop(), Some(Modal::Help { scroll_offset: 0 }));
        assert_eq!(modals.top(), Some(&Modal::QuitConfirm));

        assert_eq!(modals.pop(), Some(Modal::QuitConfirm));
        assert!(modals.is_empty());
        assert_eq!(modals.pop(), None);
    }

    #[test]
    fn test_top_mut_edits_in_place() {
        let mut modals = ModalStack::default();
        modals.push(Modal::SaveBuild {
            name: "Ri".to_string(),
        });

        if let Some(Modal::SaveBuild { name }) = modals.top_mut() {
            name.push('g');
        }

        assert_eq!(
            modals.top(),
            Some(&Modal::SaveBuild {
                name: "Rig".to_string()
            })
        );
    }
}
