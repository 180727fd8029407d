//! Module containing tests for binning, configuration and the MI estimator.
mod binning_tests;
mod config_tests;
