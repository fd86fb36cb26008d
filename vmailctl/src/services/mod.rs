pub mod accounts;
pub mod aliases;
pub mod domain_lookup;
pub mod executor;
pub mod id_allocator;
pub mod validation;

pub use accounts::AccountService;
pub use aliases::AliasService;
pub use domain_lookup::DomainLookup;
pub use executor::Executor;
pub use id_allocator::IdAllocator;
pub use validation::validate;
