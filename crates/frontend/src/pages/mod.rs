//! Page components.

mod main;
mod notification;
mod question_bank;
mod sign_up;

pub use main::MainPage;
pub use notification::NotificationPage;
pub use question_bank::QuestionBankPage;
pub use sign_up::SignUpPage;
