//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 요청 DTO들을 정의합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조, 타입 일치, 필수 필드 존재 (`serde`)
//! 2. **교차 필드 검증**: 부분 수정 요청의 "최소 하나의 값" 규칙
//! 3. **형식 검증**: 이메일, 길이, 닉네임 문법, URL, 자기소개 길이 (`validator`)
//!
//! 검증 실패는 모두 `AppError::ValidationError`로 변환됩니다.

pub mod auth_request;
pub mod create_user;
pub mod update_user;

pub use auth_request::LoginRequest;
pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
