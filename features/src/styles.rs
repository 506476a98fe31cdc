//! CSS for the features section.
//!
//! The section is self-contained: [`FEATURES_CSS`] styles everything the
//! components render, including hover feedback, and is embedded by
//! [`FeaturesDocument`](crate::components::FeaturesDocument) and by the
//! landing app.
//!
//! # Customization
//!
//! ```rust
//! use features_section::styles::FEATURES_CSS;
//!
//! let brand = ":root { --features-primary: #0ea5e9; }";
//! let combined = format!("{}\n{}", FEATURES_CSS, brand);
//! ```
//!
//! Entrance transitions are inline styles driven by
//! [`Reveal`](crate::motion::Reveal); this sheet only sets the resting look.

/// Complete CSS for the section.
///
/// Selectors avoid the child combinator so the sheet survives text escaping
/// when embedded as a `<style>` child.
pub const FEATURES_CSS: &str = r#"
:root {
  --features-bg: #ffffff;
  --features-muted-bg: #f4f6f8;
  --features-fg: #0f172a;
  --features-muted-fg: #64748b;
  --features-border: #e2e8f0;
  --features-primary: #2563eb;
  --features-primary-soft: rgba(37, 99, 235, 0.1);
  --features-primary-fg: #ffffff;
  --features-radius: 12px;
  --features-font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

@media (prefers-color-scheme: dark) {
  :root {
    --features-bg: #0b1120;
    --features-muted-bg: #111827;
    --features-fg: #e5e7eb;
    --features-muted-fg: #94a3b8;
    --features-border: #1f2937;
    --features-primary: #60a5fa;
    --features-primary-soft: rgba(96, 165, 250, 0.12);
    --features-primary-fg: #0b1120;
  }
}

.features-section {
  padding: 96px 0;
  font-family: var(--features-font);
  color: var(--features-fg);
  background: linear-gradient(180deg, var(--features-bg), var(--features-muted-bg));
}

.features-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 24px;
}

/* Header */

.features-header {
  max-width: 768px;
  margin: 0 auto 64px;
  text-align: center;
}

.features-badge {
  display: inline-block;
  margin-bottom: 16px;
  padding: 8px 16px;
  border: 1px solid var(--features-border);
  border-radius: 999px;
  font-size: 14px;
  font-weight: 500;
}

.features-title {
  margin: 0 0 24px;
  font-size: clamp(30px, 4vw, 48px);
  font-weight: 700;
  line-height: 1.15;
}

.features-title-highlight {
  display: block;
  background: linear-gradient(90deg, var(--features-primary), rgba(37, 99, 235, 0.6));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.features-description {
  margin: 0;
  font-size: 18px;
  line-height: 1.7;
  color: var(--features-muted-fg);
}

/* Grid */

.features-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 32px;
}

.feature-card {
  position: relative;
  display: flex;
  flex-direction: column;
  height: 100%;
  overflow: hidden;
  border: 1px solid var(--features-border);
  border-radius: var(--features-radius);
  background: var(--features-bg);
  transition: border-color 300ms, box-shadow 300ms;
}

.feature-card:hover {
  border-color: var(--features-primary-soft);
  box-shadow: 0 12px 32px var(--features-primary-soft);
}

.feature-card-glow {
  position: absolute;
  inset: 0;
  pointer-events: none;
  opacity: 0;
  background: linear-gradient(135deg, var(--features-primary-soft), transparent 60%);
  transition: opacity 300ms;
}

.feature-card:hover .feature-card-glow {
  opacity: 1;
}

.feature-media {
  position: relative;
  height: 192px;
  overflow: hidden;
}

.feature-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 300ms;
}

.feature-card:hover .feature-media img {
  transform: scale(1.05);
}

.feature-media-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(0deg, rgba(0, 0, 0, 0.2), transparent);
}

.feature-badge {
  position: absolute;
  top: 12px;
  right: 12px;
  padding: 2px 10px;
  border-radius: 999px;
  font-size: 12px;
  font-weight: 600;
  background: rgba(255, 255, 255, 0.9);
  color: #0f172a;
  backdrop-filter: blur(4px);
}

.feature-card-header {
  position: relative;
  padding: 24px 24px 8px;
}

.feature-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  margin-bottom: 12px;
  border-radius: 12px;
  color: var(--features-primary);
  background: var(--features-primary-soft);
  transition: background 300ms;
}

.feature-card:hover .feature-icon {
  background: rgba(37, 99, 235, 0.2);
}

.feature-title {
  margin: 0;
  font-size: 20px;
  font-weight: 600;
  transition: color 300ms;
}

.feature-card:hover .feature-title {
  color: var(--features-primary);
}

.feature-description {
  position: relative;
  margin: 0;
  padding: 0 24px 24px;
  font-size: 16px;
  line-height: 1.7;
  color: var(--features-muted-fg);
}

/* Call to action */

.features-cta {
  margin-top: 64px;
  text-align: center;
}

.features-cta-question {
  margin: 0 0 16px;
  color: var(--features-muted-fg);
}

.features-cta-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 16px;
  justify-content: center;
}

.btn {
  padding: 12px 24px;
  border-radius: 8px;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: transform 150ms, background 150ms;
}

.btn:hover {
  transform: scale(1.05);
}

.btn:active {
  transform: scale(0.95);
}

.btn:focus-visible {
  outline: 2px solid var(--features-primary);
  outline-offset: 2px;
}

.btn-primary {
  border: 1px solid var(--features-primary);
  background: var(--features-primary);
  color: var(--features-primary-fg);
}

.btn-outline {
  border: 1px solid var(--features-border);
  background: transparent;
  color: var(--features-fg);
}

/* Responsive */

@media (max-width: 1024px) {
  .features-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (max-width: 640px) {
  .features-section {
    padding: 64px 0;
  }

  .features-grid {
    grid-template-columns: minmax(0, 1fr);
  }

  .features-cta-actions {
    flex-direction: column;
  }
}

@media (prefers-reduced-motion: reduce) {
  .features-header,
  .feature-card,
  .features-cta {
    transition: none !important;
  }
}
"#;
