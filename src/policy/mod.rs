pub mod mru;
