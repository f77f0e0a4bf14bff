//! Session State
//!
//! The single mutable record threaded through every command: where the player
//! is, who they are, and which protected paths they have opened.

use std::collections::HashSet;

/// Marker held in the first slot of the path stack.
pub const ROOT_MARKER: &str = "/";

#[derive(Debug, Clone)]
pub struct Session {
    current_path: Vec<String>,
    player_name: String,
    renamed: bool,
    unlocked_paths: HashSet<String>,
    /// Bypasses every lock check when set.
    pub dev_mode: bool,
}

impl Session {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            current_path: vec![ROOT_MARKER.to_string()],
            player_name: player_name.into(),
            renamed: false,
            unlocked_paths: HashSet::new(),
            dev_mode: false,
        }
    }

    /// Session with a name of the form `user_1a2b3c4d`.
    pub fn with_generated_name() -> Self {
        Self::new(generate_player_name())
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Replace the generated name. Only the first non-blank call takes effect.
    pub fn rename_once(&mut self, name: &str) -> bool {
        let name = name.trim();
        if self.renamed || name.is_empty() {
            return false;
        }
        self.player_name = name.to_string();
        self.renamed = true;
        true
    }

    /// Path stack including the root marker. Never empty.
    pub fn current_path(&self) -> &[String] {
        &self.current_path
    }

    /// Segments below the root.
    pub fn segments(&self) -> &[String] {
        &self.current_path[1..]
    }

    pub fn is_at_root(&self) -> bool {
        self.current_path.len() == 1
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.current_path.push(segment.into());
    }

    /// Drop the last segment. Returns false at the root.
    pub fn pop(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        self.current_path.pop();
        true
    }

    /// `/` at the root, `/a/b` otherwise.
    pub fn display_path(&self) -> String {
        if self.is_at_root() {
            ROOT_MARKER.to_string()
        } else {
            format!("/{}", self.segments().join("/"))
        }
    }

    /// Unlock identity of `name` inside the current directory.
    pub fn full_path(&self, name: &str) -> String {
        if self.is_at_root() {
            format!("/{}", name)
        } else {
            format!("{}/{}", self.display_path(), name)
        }
    }

    pub fn is_unlocked(&self, full_path: &str) -> bool {
        self.dev_mode || self.unlocked_paths.contains(full_path)
    }

    pub fn mark_unlocked(&mut self, full_path: String) {
        self.unlocked_paths.insert(full_path);
    }

    pub fn unlocked_paths(&self) -> &HashSet<String> {
        &self.unlocked_paths
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_generated_name()
    }
}

pub fn generate_player_name() -> String {
    format!("user_{:08x}", rand::random::<u32>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_shape() {
        let name = generate_player_name();
        assert!(name.starts_with("user_"));
        assert_eq!(name.len(), 13);
        assert!(name[5..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_rename_once() {
        let mut session = Session::new("user_00000000");
        assert!(!session.rename_once("   "));
        assert_eq!(session.player_name(), "user_00000000");
        assert!(session.rename_once("  neo "));
        assert_eq!(session.player_name(), "neo");
        assert!(!session.rename_once("trinity"));
        assert_eq!(session.player_name(), "neo");
    }

    #[test]
    fn test_pop_at_root_is_noop() {
        let mut session = Session::new("p");
        assert!(!session.pop());
        assert_eq!(session.current_path(), &["/".to_string()]);
    }

    #[test]
    fn test_paths() {
        let mut session = Session::new("p");
        assert_eq!(session.display_path(), "/");
        assert_eq!(session.full_path("about.txt"), "/about.txt");

        session.push("lab");
        session.push("vault");
        assert_eq!(session.display_path(), "/lab/vault");
        assert_eq!(session.full_path("notes"), "/lab/vault/notes");
        assert_eq!(session.segments(), &["lab".to_string(), "vault".to_string()]);

        assert!(session.pop());
        assert_eq!(session.display_path(), "/lab");
    }

    #[test]
    fn test_dev_mode_overrides_unlocked_set() {
        let mut session = Session::new("p");
        assert!(!session.is_unlocked("/secret"));
        session.dev_mode = true;
        assert!(session.is_unlocked("/secret"));
        assert!(session.unlocked_paths().is_empty());
    }
}
