//! Test suite for the account auth service
