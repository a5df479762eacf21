mod execute_lookup;

pub use execute_lookup::ExecuteLookupUseCase;
