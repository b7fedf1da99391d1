pub mod image {
    pub mod filesystem;
    pub mod naming;
}
