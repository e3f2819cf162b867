//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 전달하는 응답 DTO들을 정의합니다.
//!
//! - **데이터 은닉**: 비밀번호는 어떤 응답에도 포함되지 않음
//! - **응답 검증**: 나가는 데이터도 요청과 같은 필드 규칙으로 검증 가능
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "0d8f3b4e-6a51-4c39-9d3e-1f3a6b0a2c11",
//!   "email": "john.doe@example.com",
//!   "nickname": "jolly_koala_417",
//!   "first_name": "John",
//!   "last_name": "Doe",
//!   "bio": "Experienced developer",
//!   "profile_picture_url": "https://example.com/profiles/john.jpg",
//!   "linkedin_profile_url": "https://linkedin.com/in/johndoe",
//!   "github_profile_url": "https://github.com/johndoe",
//!   "role": "AUTHENTICATED",
//!   "is_professional": false
//! }
//! ```

pub mod error_response;
pub mod user_response;

pub use error_response::ErrorResponse;
pub use user_response::{UserListResponse, UserResponse};
