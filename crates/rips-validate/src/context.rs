use rips_standards::CatalogSource;
use rips_store::RecordStore;

/// Collaborators a record validator reads from.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub store: &'a dyn RecordStore,
    pub catalogs: &'a dyn CatalogSource,
}

impl<'a> ValidationContext<'a> {
    pub fn new(store: &'a dyn RecordStore, catalogs: &'a dyn CatalogSource) -> Self {
        Self { store, catalogs }
    }
}
