//! # gilt-stepper
//!
//! A touch-draggable vertical stepper widget for terminal UIs.
//!
//! The stepper holds a bounded numeric value. Its upper half increments and
//! its lower half decrements. Holding a press can auto-repeat, and dragging
//! across the middle flips the direction mid-press. Committed changes are
//! reported to a weakly held delegate.
//!
//! ## Modules
//!
//! - **[`widgets`]**: [`VerticalStepper`](widgets::VerticalStepper), its delegate and repeat timer
//! - **[`config`]**: [`StepperConfig`](config::StepperConfig) defaults and builder
//! - **[`decl`]**: logos-based parser for declarative stepper descriptions
//! - **[`event`]**: crossterm-decoupled input events and the touch model
//! - **[`render`]**: strip primitives and the crossterm output driver
//! - **[`widget`]**: the `Widget` trait
//! - **[`app`]**: a tokio event loop hosting one stepper
//! - **[`testing`]**: headless `Pilot` with a virtual clock, snapshot helpers
//! - **[`geometry`]**: `Offset` and `Region` primitives

// Foundation
pub mod geometry;

// Configuration
pub mod config;
pub mod decl;

// Widget system
pub mod widget;
pub mod widgets;

// Events and rendering
pub mod event;
pub mod render;

// Application
pub mod app;
pub mod testing;
