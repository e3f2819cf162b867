//! # Domain Layer Module
//!
//! 사용자 엔티티와 그 용도별 표현(DTO)을 담당하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - UserProfile, UserRole
//! └── DTOs      - Create / Update / Login / Response / List / Error 표현
//! ```
//!
//! 모든 검증은 요청 하나에 대해 동기적으로 수행되며 상태를 남기지 않습니다.

pub mod dto;
pub mod entities;
