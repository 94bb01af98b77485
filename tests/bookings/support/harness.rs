use std::sync::Arc;

use meeting_rooms_api::bookings::application::{
    command_services::bookings_command_service_impl::BookingsCommandServiceImpl,
    query_services::bookings_query_service_impl::BookingsQueryServiceImpl,
};

use super::{
    fakes::{FakeBookingNotifier, FakeBookingRepository},
    fixtures::MFA_CODE,
};

pub struct BookingsCommandHarness {
    pub repository: Arc<FakeBookingRepository>,
    pub notifier: Arc<FakeBookingNotifier>,
    pub service: BookingsCommandServiceImpl,
}

pub struct BookingsQueryHarness {
    pub repository: Arc<FakeBookingRepository>,
    pub service: BookingsQueryServiceImpl,
}

pub fn create_command_harness() -> BookingsCommandHarness {
    let repository = Arc::new(FakeBookingRepository::new());
    let notifier = Arc::new(FakeBookingNotifier::new());

    let service = BookingsCommandServiceImpl::new(
        repository.clone(),
        notifier.clone(),
        MFA_CODE.to_string(),
    );

    BookingsCommandHarness {
        repository,
        notifier,
        service,
    }
}

pub fn create_query_harness() -> BookingsQueryHarness {
    let repository = Arc::new(FakeBookingRepository::new());

    let service = BookingsQueryServiceImpl::new(repository.clone());

    BookingsQueryHarness {
        repository,
        service,
    }
}
