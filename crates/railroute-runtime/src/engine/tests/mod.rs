//! Test modules for the routing engine



#[cfg(test)]
mod invariants_test;
