//! Game file tree and navigator
//!
//! The tree is immutable once built. All per-player state (position, unlocked
//! paths, dev mode) lives in the [`Session`] handed to each operation.

use std::sync::Arc;
use tracing::debug;

use super::types::*;
use crate::session::Session;

pub struct GameFs {
    root: Arc<Children>,
}

impl GameFs {
    pub fn new(root: Children) -> Self {
        Self { root: Arc::new(root) }
    }

    /// Entries of the directory the session is in.
    ///
    /// Locked directories along the way are entered without consulting the
    /// session; locks are only checked when changing directory.
    pub fn current_directory(&self, session: &Session) -> Result<Arc<Children>, FsError> {
        let mut current = Arc::clone(&self.root);
        for segment in session.segments() {
            let next = current
                .get(segment)
                .and_then(|node| node.children(session))
                .ok_or_else(|| FsError::BrokenPath {
                    path: session.display_path(),
                })?;
            current = next;
        }
        Ok(current)
    }

    /// A child of the current directory.
    pub fn lookup(&self, session: &Session, name: &str) -> Result<Option<Node>, FsError> {
        Ok(self.current_directory(session)?.get(name).cloned())
    }

    pub fn change_directory(&self, session: &mut Session, target: &str) -> Result<(), FsError> {
        if target == ".." {
            session.pop();
            return Ok(());
        }

        let node = self.lookup(session, target)?;
        match node {
            Some(Node::Directory { .. }) => {}
            Some(Node::LockedDirectory { lock, .. }) => {
                if !session.is_unlocked(&session.full_path(target)) {
                    debug!(dir = target, "refused entry into sealed directory");
                    return Err(FsError::Locked {
                        name: target.to_string(),
                        kind: LockedKind::Directory,
                        message: lock.locked_message,
                    });
                }
            }
            _ => {
                return Err(FsError::NoSuchDirectory {
                    name: target.to_string(),
                })
            }
        }

        session.push(target);
        debug!(path = %session.display_path(), "changed directory");
        Ok(())
    }

    pub fn list(&self, session: &Session) -> Result<Listing, FsError> {
        let children = self.current_directory(session)?;
        if children.is_empty() {
            return Ok(Listing::Empty);
        }

        let entries = children
            .iter()
            .map(|(name, node)| {
                let unlocked = || session.is_unlocked(&session.full_path(name));
                let kind = match node {
                    Node::Directory { .. } => EntryKind::Directory,
                    Node::LockedDirectory { .. } => EntryKind::LockedDirectory {
                        unlocked: unlocked(),
                    },
                    Node::File { .. } | Node::ComputedFile { .. } => EntryKind::File,
                    Node::LockedFile { .. } => EntryKind::LockedFile {
                        unlocked: unlocked(),
                    },
                };
                DirEntry {
                    name: name.clone(),
                    kind,
                }
            })
            .collect();
        Ok(Listing::Entries(entries))
    }

    pub fn read_file(&self, session: &Session, name: &str) -> Result<String, FsError> {
        match self.lookup(session, name)? {
            Some(Node::File { content }) => Ok(content),
            Some(Node::ComputedFile { resolve }) => Ok(resolve(session)),
            Some(Node::LockedFile { content, lock }) => {
                if session.is_unlocked(&session.full_path(name)) {
                    Ok(content.resolve(session))
                } else {
                    Err(FsError::Locked {
                        name: name.to_string(),
                        kind: LockedKind::File,
                        message: lock.locked_message,
                    })
                }
            }
            Some(Node::Directory { .. }) | Some(Node::LockedDirectory { .. }) | None => {
                Err(FsError::NoSuchFile {
                    name: name.to_string(),
                })
            }
        }
    }
}

impl Default for GameFs {
    fn default() -> Self {
        super::world::default_world()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fs() -> GameFs {
        GameFs::new(collect_children([
            ("readme.txt", Node::file("plain text")),
            (
                "whoami",
                Node::computed(|s: &Session| format!("you are {}", s.player_name())),
            ),
            (
                "lab",
                Node::dir([
                    ("empty", Node::dir(Vec::<(String, Node)>::new())),
                    (
                        "vault",
                        Node::locked_dir(
                            [("gold.txt", Node::file("shiny"))],
                            "Open-Sesame",
                            "The vault door is sealed.",
                        ),
                    ),
                ]),
            ),
            (
                "diary.txt",
                Node::locked_file("dear diary", "rosebud", "The diary is locked."),
            ),
        ]))
    }

    #[test]
    fn test_list_root_in_insertion_order() {
        let fs = sample_fs();
        let session = Session::new("p");
        let listing = fs.list(&session).unwrap();
        let Listing::Entries(entries) = listing else {
            panic!("expected entries");
        };
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["readme.txt", "whoami", "lab", "diary.txt"]);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(entries[2].kind, EntryKind::Directory);
        assert_eq!(entries[3].kind, EntryKind::LockedFile { unlocked: false });
        assert!(!entries[3].kind.is_directory());
    }

    #[test]
    fn test_list_empty_directory() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        fs.change_directory(&mut session, "lab").unwrap();
        fs.change_directory(&mut session, "empty").unwrap();
        assert_eq!(fs.list(&session).unwrap(), Listing::Empty);
    }

    #[test]
    fn test_cd_round_trip() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        let start = session.current_path().to_vec();
        fs.change_directory(&mut session, "lab").unwrap();
        fs.change_directory(&mut session, "empty").unwrap();
        assert_eq!(session.display_path(), "/lab/empty");
        fs.change_directory(&mut session, "..").unwrap();
        fs.change_directory(&mut session, "..").unwrap();
        assert_eq!(session.current_path(), start.as_slice());
        fs.change_directory(&mut session, "..").unwrap();
        assert_eq!(session.current_path(), start.as_slice());
    }

    #[test]
    fn test_cd_into_file_or_missing() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        for target in ["readme.txt", "diary.txt", "nowhere"] {
            let err = fs.change_directory(&mut session, target).unwrap_err();
            assert_eq!(
                err,
                FsError::NoSuchDirectory {
                    name: target.to_string()
                }
            );
            assert!(session.is_at_root());
        }
    }

    #[test]
    fn test_cd_into_sealed_directory_is_refused_every_time() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        fs.change_directory(&mut session, "lab").unwrap();
        for _ in 0..3 {
            match fs.change_directory(&mut session, "vault") {
                Err(FsError::Locked { kind, message, .. }) => {
                    assert_eq!(kind, LockedKind::Directory);
                    assert_eq!(message, "The vault door is sealed.");
                }
                other => panic!("unexpected: {:?}", other),
            }
            assert_eq!(session.display_path(), "/lab");
        }
    }

    #[test]
    fn test_cd_into_unlocked_directory() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        fs.change_directory(&mut session, "lab").unwrap();
        session.mark_unlocked("/lab/vault".to_string());
        fs.change_directory(&mut session, "vault").unwrap();
        assert_eq!(fs.read_file(&session, "gold.txt").unwrap(), "shiny");
    }

    #[test]
    fn test_stored_path_is_not_revalidated() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        session.dev_mode = true;
        fs.change_directory(&mut session, "lab").unwrap();
        fs.change_directory(&mut session, "vault").unwrap();
        session.dev_mode = false;
        assert_eq!(fs.read_file(&session, "gold.txt").unwrap(), "shiny");
    }

    #[test]
    fn test_read_file_variants() {
        let fs = sample_fs();
        let session = Session::new("trinity");
        assert_eq!(fs.read_file(&session, "readme.txt").unwrap(), "plain text");
        assert_eq!(fs.read_file(&session, "whoami").unwrap(), "you are trinity");
        assert_eq!(
            fs.read_file(&session, "lab").unwrap_err(),
            FsError::NoSuchFile {
                name: "lab".to_string()
            }
        );
        assert!(matches!(
            fs.read_file(&session, "missing"),
            Err(FsError::NoSuchFile { .. })
        ));
    }

    #[test]
    fn test_locked_file_needs_unlock_or_dev_mode() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        for _ in 0..2 {
            let err = fs.read_file(&session, "diary.txt").unwrap_err();
            assert_eq!(err.to_string(), "The diary is locked.");
        }

        session.dev_mode = true;
        assert_eq!(fs.read_file(&session, "diary.txt").unwrap(), "dear diary");

        session.dev_mode = false;
        session.mark_unlocked("/diary.txt".to_string());
        assert_eq!(fs.read_file(&session, "diary.txt").unwrap(), "dear diary");
        let Listing::Entries(entries) = fs.list(&session).unwrap() else {
            panic!("expected entries");
        };
        assert_eq!(entries[3].kind, EntryKind::LockedFile { unlocked: true });
    }

    #[test]
    fn test_computed_directory_sees_session() {
        let fs = GameFs::new(collect_children([(
            "mirror",
            Node::locked_computed_dir(
                |s: &Session| collect_children([(s.player_name().to_string(), Node::file("hi"))]),
                "x",
                "sealed",
            ),
        )]));
        let mut session = Session::new("morpheus");
        session.dev_mode = true;
        fs.change_directory(&mut session, "mirror").unwrap();
        assert_eq!(fs.read_file(&session, "morpheus").unwrap(), "hi");
    }

    #[test]
    fn test_broken_path_is_reported() {
        let fs = GameFs::new(collect_children([(
            "shifting",
            Node::locked_computed_dir(
                |s: &Session| {
                    if s.dev_mode {
                        collect_children([("inner", Node::dir(Vec::<(String, Node)>::new()))])
                    } else {
                        Children::new()
                    }
                },
                "x",
                "sealed",
            ),
        )]));
        let mut session = Session::new("p");
        session.dev_mode = true;
        fs.change_directory(&mut session, "shifting").unwrap();
        fs.change_directory(&mut session, "inner").unwrap();
        session.dev_mode = false;
        assert_eq!(
            fs.list(&session).unwrap_err(),
            FsError::BrokenPath {
                path: "/shifting/inner".to_string()
            }
        );
    }
}
