pub mod blog;
pub mod departments;
pub mod faculty;
pub mod programs;
pub mod services;

pub use blog::BlogPostDto;
pub use departments::DepartmentDto;
pub use faculty::FacultyMemberDto;
pub use programs::AcademicProgramDto;
pub use services::ClinicServiceDto;
