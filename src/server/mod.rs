//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the maze service,
//! including API endpoints, business logic, and data access. The backend uses Axum as
//! the web framework, SeaORM for database operations, and utoipa to publish the OpenAPI
//! contract of every endpoint.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Extractors** (`extract`) - `Json`/`Path`/`Query` wrappers reporting rejections as `AppError`
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, maze limits)
//! - **Startup** (`startup`) - Logging, database initialization and app assembly
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** executes business logic, orchestrates data operations and the maze core
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
