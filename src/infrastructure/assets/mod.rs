mod local;

pub use local::LocalAssetStore;
