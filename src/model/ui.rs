//! Screen and mode enums shared across the app shell
//!
//! Most presentation state lives in the screen components themselves,
//! which own their list cursors and filters.

/// Top-level screens, switched with the number keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Parts,
    Builds,
    Configurator,
    Compare,
    Profile,
}

impl Screen {
    pub fn all() -> Vec<Screen> {
        vec![
            Screen::Parts,
            Screen::Builds,
            Screen::Configurator,
            Screen::Compare,
            Screen::Profile,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            Screen::Parts => "Parts",
            Screen::Builds => "Builds",
            Screen::Configurator => "Configurator",
            Screen::Compare => "Compare",
            Screen::Profile => "Profile",
        }
    }

    /// The number key that jumps to this screen
    pub fn key(&self) -> char {
        match self {
            Screen::Parts => '1',
            Screen::Builds => '2',
            Screen::Configurator => '3',
            Screen::Compare => '4',
            Screen::Profile => '5',
        }
    }
}

/// Splash first, then the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_keys_are_sequential() {
        let keys: Vec<char> = Screen::all().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!['1', '2', '3', '4', '5']);
    }
}
