//! mockall doubles for the supervisor-facing port.

use hkd_cli::application::ports::CommandRunner;
use mockall::mock;

mock! {
    pub Runner {}

    impl CommandRunner for Runner {
        fn run(&self, argv: &[String]) -> i32;
        fn probe(&self, argv: &[String]) -> i32;
    }
}
