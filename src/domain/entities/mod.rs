//! # Domain Entities
//!
//! 스키마 계층이 다루는 단일 엔티티 `UserProfile`과 역할 열거형을 정의합니다.
//! 요청/응답 DTO는 모두 이 엔티티의 특정 용도별 표현(representation)입니다.
//!
//! 엔티티는 요청 하나를 처리하는 동안만 존재하며 저장되지 않습니다.
//!
//! ```text
//! CreateUserRequest ──from_create──▶ UserProfile ──From──▶ UserResponse
//!                                        ▲
//! UpdateUserRequest ──apply_update───────┘
//! ```

pub mod users;

pub use users::*;
