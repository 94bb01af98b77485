pub mod jwt_authentication_facade_impl;
