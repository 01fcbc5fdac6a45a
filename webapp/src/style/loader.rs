pub const LOADER_STYLES: &str = r#"
/* Intro overlay */
.loader {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--overlay);
  z-index: 100;
}

.loader.phase-done {
  display: none;
}

.loader-glyphs {
  display: flex;
  gap: var(--space-2);
  font-size: 4rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  color: var(--text-inverse);
}

.loader-glyph {
  opacity: 0;
  transform: translateY(24px);
  transition-property: opacity, transform;
  transition-timing-function: var(--easing-standard);
}

.loader.phase-enter .loader-glyph {
  opacity: 1;
  transform: translateY(0);
}

.loader.phase-exit .loader-glyph {
  opacity: 0;
  transform: translateY(-24px);
}

.loader.phase-exit {
  opacity: 0;
  transition-property: opacity;
}
"#;
