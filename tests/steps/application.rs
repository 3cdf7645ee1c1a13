//! Step definitions for application startup

use crate::common::world::{CountrylineWorld, UNREACHABLE_SERVER};
use cucumber::given;
use tracing::info;

#[given("the country service is running")]
async fn given_service_running(world: &mut CountrylineWorld) {
    info!("Starting application against a mock country service");
    world
        .start_with_mock_service(&[])
        .await
        .expect("application should start");
}

#[given("the country service is running with stale responses discarded")]
async fn given_service_running_discard_stale(world: &mut CountrylineWorld) {
    world
        .start_with_mock_service(&["--discard-stale"])
        .await
        .expect("application should start");
}

#[given("the country service is unreachable")]
async fn given_service_unreachable(world: &mut CountrylineWorld) {
    world
        .start_application(UNREACHABLE_SERVER, &[])
        .expect("application should start");
}
