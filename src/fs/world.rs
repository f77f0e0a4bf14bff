//! The shipped game world.

use super::game_fs::GameFs;
use super::types::{collect_children, Node};
use crate::session::Session;

pub fn default_world() -> GameFs {
    GameFs::new(collect_children([("about.txt", about_file())]))
}

fn about_file() -> Node {
    Node::computed(|session: &Session| {
        format!(
            "\nHello {},\n\n\
             Project-Injections is a game made by _gamerxr.637_\n\
             Github: https://github.com/GamerXR-637\n\
             Website: https://gamerxr637.is-a.dev/\n",
            session.player_name()
        )
    })
}
