/*!
# XLSX-Chat

A chat-style web front-end for asking natural-language questions about
an uploaded spreadsheet, built in Rust.

## Overview

Each question typed into the chat page is forwarded to an external
query backend over HTTP. The answer comes back as free text; answers
that carry tab-delimited survey tables are detected and reformatted
into HTML tables before being shown. A cookie-based admin gate protects
the dashboard route.

## Architecture

The application follows a client-server architecture:

### Frontend Layer
- **Technologies**: HTML, CSS, vanilla JavaScript
- **Key Components**:
  - Chat page with sidebar navigation and example prompts
  - Message list that renders plain answers and table answers
  - Submit form that disables itself while a question is outstanding

### Backend Layer
- **Technologies**: Rust, axum
- **Core Components**:
  - Response Classifier - Decides whether an answer is a count table,
    a summary grid, or plain prose
  - Table Renderer - Parses tab-delimited answers into rows with
    header and emphasis information
  - Chat Route - Forwards the question to the query backend and wraps
    the formatted answer in a server-sent-events envelope
  - Admin Gate - Cookie check in front of the dashboard

### External Collaborator
- The query backend accepts `POST /query` with `{"query": ...}` and
  answers `{"response": ...}` on success or `{"detail": ...}` on
  failure.

## Modules

- **format**: Response classification and table parsing
- **html**: HTML rendering of parsed tables
- **chat**: The `/api/chat` route and SSE envelope
- **login**: Admin login, logout, and the dashboard gate
- **config**: Environment configuration
- **error**: Error type for the chat route
- **app**: Routing and middleware

## Routes

- `GET /` - Landing page (public)
- `GET /login`, `POST /login` - Admin login (public)
- `GET /logout` - Clear the auth cookie
- `GET /dashboard` - Chat page (gated)
- `POST /api/chat` - One chat turn
- `GET /static/...` - Stylesheet and assets
*/

// Re-export all modules so they appear in the documentation
pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod format;
pub mod html;
pub mod login;

/// Re-export the core formatter types to make them easier to use
pub use format::{DisplayPayload, ParsedTable, TableFormat, TableRow, format_table_content};
