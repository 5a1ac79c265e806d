//! Workflow tests spanning several controllers.

mod coverflow_workflow_tests;
