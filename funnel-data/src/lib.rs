mod loader;

pub use loader::{
    BENCHMARKS_CSV, BenchmarkRecord, CatalogLoader, CatalogLoaderError, NICHES_CSV, NicheRecord,
    OPPORTUNITIES_CSV, OpportunityRecord,
};
