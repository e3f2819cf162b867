//! # Configuration Module
//!
//! 환경 변수 기반의 설정값을 중앙에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 실행 환경 및 닉네임 생성 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 고유 닉네임 생성 시 최대 시도 횟수 (1-100000, 기본값 1000)
//! export NICKNAME_MAX_ATTEMPTS="1000"
//! ```

pub mod app_config;

pub use app_config::*;
