//! # Core Module
//!
//! 스키마 계층 전반에서 공유하는 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **검증 에러 변환**: `validator::ValidationErrors` → `AppError` 자동 변환
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use user_profile_schemas::core::{AppError, AppResult};
//!
//! fn reject() -> AppResult<()> {
//!     Err(AppError::ValidationError("At least one field must be provided for update".into()))
//! }
//! ```

pub mod errors;

pub use errors::*;
