pub mod todo {
    pub mod repository;
}
