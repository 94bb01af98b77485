mod command_service_tests;
