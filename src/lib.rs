//! 사용자 프로필 스키마
//!
//! 사용자 관리 웹 서비스의 요청/응답 검증 스키마와 무작위 닉네임 생성기를 제공합니다.
//! HTTP 라우팅, 저장소, 인증은 이 크레이트의 범위가 아니며, 호스트 프레임워크가
//! 이 스키마들을 (역)직렬화와 검증에 사용합니다.
//!
//! # Features
//!
//! - **표현 검증**: Create / Update / Login / Response / List / Error 표현별 필드 규칙
//! - **교차 필드 검증**: 부분 수정 요청의 "최소 하나의 값" 규칙
//! - **닉네임 생성**: `{형용사}_{동물}_{0-999}` 형태, 선택적 고유성 검사
//! - **에러 변환**: `AppError` → `ErrorResponse` / Actix-Web HTTP 응답
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   JSON payload  │
//! └─────────────────┘
//!          │ parse_request
//!          ▼
//! ┌─────────────────┐
//! │      DTOs       │ ← serde + validator
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserProfile   │ ← 요청 단위 엔티티
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_profile_schemas::domain::dto::parse_request;
//! use user_profile_schemas::domain::dto::users::request::CreateUserRequest;
//! use user_profile_schemas::domain::entities::UserProfile;
//! use user_profile_schemas::domain::dto::users::response::UserResponse;
//!
//! let request = parse_request::<CreateUserRequest>(body)?;
//! let response = UserResponse::from(UserProfile::new(&request));
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
