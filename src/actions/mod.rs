pub mod album_actions;

#[cfg(test)]
pub mod testing;
