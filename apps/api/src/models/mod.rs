pub mod book;
pub mod career;
pub mod playlist;
