mod course_card_vm;
mod nav_vm;
mod notice_vm;

pub use course_card_vm::{CourseCardVm, EnrollAction, enroll_action, map_course_cards};
pub use nav_vm::Section;
pub use notice_vm::{
    NoticeVm, auth_required_notice, enrolled_notice, enrollment_error_notice,
    session_error_notice, signed_out_notice, welcome_notice,
};
