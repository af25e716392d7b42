// Video playlists for a goal, from the video platform's search API.

pub mod handlers;
pub mod search;
