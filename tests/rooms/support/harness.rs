use std::sync::Arc;

use meeting_rooms_api::rooms::application::{
    command_services::rooms_command_service_impl::RoomsCommandServiceImpl,
    query_services::rooms_query_service_impl::RoomsQueryServiceImpl,
};

use super::fakes::FakeRoomRepository;

pub struct RoomsCommandHarness {
    pub repository: Arc<FakeRoomRepository>,
    pub service: RoomsCommandServiceImpl,
}

pub struct RoomsQueryHarness {
    pub repository: Arc<FakeRoomRepository>,
    pub service: RoomsQueryServiceImpl,
}

pub fn create_command_harness() -> RoomsCommandHarness {
    let repository = Arc::new(FakeRoomRepository::new());

    let service = RoomsCommandServiceImpl::new(repository.clone());

    RoomsCommandHarness {
        repository,
        service,
    }
}

pub fn create_query_harness() -> RoomsQueryHarness {
    let repository = Arc::new(FakeRoomRepository::new());

    let service = RoomsQueryServiceImpl::new(repository.clone());

    RoomsQueryHarness {
        repository,
        service,
    }
}
