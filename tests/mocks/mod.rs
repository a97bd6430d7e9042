pub mod mock_mail_relay;
pub mod mock_record_repository;

pub use mock_mail_relay::MockMailRelay;
pub use mock_record_repository::MockRecordRepository;
