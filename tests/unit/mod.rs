mod snapshot_restore_tests;
mod validation_tests;
