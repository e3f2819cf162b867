//! # User Data Transfer Objects Module
//!
//! 사용자 엔티티의 용도별 표현(representation)을 정의하는 모듈입니다.
//!
//! ## 표현 목록
//!
//! | 표현 | 타입 | 방향 | 비고 |
//! |------|------|------|------|
//! | Create | `CreateUserRequest` | 요청 | 닉네임/이메일/비밀번호 필수 |
//! | Update | `UpdateUserRequest` | 요청 | 유일한 부분 표현, 최소 하나의 값 필요 |
//! | Login | `LoginRequest` | 요청 | 이메일/비밀번호 |
//! | Response | `UserResponse` | 응답 | 비밀번호 없음 |
//! | List | `UserListResponse` | 응답 | 페이지네이션 |
//! | Error | `ErrorResponse` | 응답 | `error`, `details` |
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs
//! │   ├── update_user.rs
//! │   └── auth_request.rs
//! └── response/
//!     ├── user_response.rs
//!     └── error_response.rs
//! ```
//!
//! ## 닉네임 문법
//!
//! 생성/응답 표현은 `^[\w-]+$`를, 수정 표현은 앞뒤 하이픈/언더스코어를 금지하는
//! 엄격한 문법과 3-20자 제한을 사용합니다. 닉네임 생성기도 엄격한 문법을 따릅니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
