//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts

use crossterm::event::KeyCode;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active in the slider panel
    Sliders,
    /// Active in dialogs
    Dialog,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('q'),
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('?'),
        description: "Help",
        context: KeyContext::Global,
    },
    // Sliders
    Keybinding {
        key: KeyCode::Char('j'),
        description: "Next slider",
        context: KeyContext::Sliders,
    },
    Keybinding {
        key: KeyCode::Char('k'),
        description: "Previous slider",
        context: KeyContext::Sliders,
    },
    Keybinding {
        key: KeyCode::Char('h'),
        description: "Decrease value",
        context: KeyContext::Sliders,
    },
    Keybinding {
        key: KeyCode::Char('l'),
        description: "Increase value",
        context: KeyContext::Sliders,
    },
    Keybinding {
        key: KeyCode::Char('H'),
        description: "Decrease value (x10)",
        context: KeyContext::Sliders,
    },
    Keybinding {
        key: KeyCode::Char('L'),
        description: "Increase value (x10)",
        context: KeyContext::Sliders,
    },
    Keybinding {
        key: KeyCode::Char('g'),
        description: "First slider",
        context: KeyContext::Sliders,
    },
    Keybinding {
        key: KeyCode::Char('G'),
        description: "Last slider",
        context: KeyContext::Sliders,
    },
    Keybinding {
        key: KeyCode::Char('a'),
        description: "Add job",
        context: KeyContext::Sliders,
    },
    // Dialog
    Keybinding {
        key: KeyCode::Esc,
        description: "Close dialog",
        context: KeyContext::Dialog,
    },
    Keybinding {
        key: KeyCode::Enter,
        description: "Confirm",
        context: KeyContext::Dialog,
    },
    Keybinding {
        key: KeyCode::Tab,
        description: "Next field",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a specific context (plus globals)
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Format a key for display
pub fn format_key(key: KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_filter_includes_globals() {
        let bindings = get_keybindings(KeyContext::Sliders);
        assert!(bindings.iter().any(|kb| kb.key == KeyCode::Char('q')));
        assert!(bindings.iter().any(|kb| kb.key == KeyCode::Char('l')));
        assert!(!bindings.iter().any(|kb| kb.key == KeyCode::Esc));
    }

    #[test]
    fn test_format_key() {
        assert_eq!(format_key(KeyCode::Char('a')), "a");
        assert_eq!(format_key(KeyCode::Esc), "Esc");
    }
}
