pub mod db;
pub mod favorite {
    pub mod repository;
}
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}

#[cfg(test)]
mod test_support;
