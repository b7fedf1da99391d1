pub mod product {
    pub mod repository;
}
pub mod user {
    pub mod repository;
}
