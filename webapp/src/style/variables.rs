pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #C2410C;          /* Burnt orange accent */
  --primary-light: #EA580C;
  --primary-dark: #9A3412;

  /* Neutrals */
  --neutral-50: #FAFAF9;
  --neutral-100: #F5F5F4;
  --neutral-200: #E7E5E4;
  --neutral-300: #D6D3D1;
  --neutral-400: #A8A29E;
  --neutral-500: #78716C;
  --neutral-600: #57534E;
  --neutral-700: #44403C;
  --neutral-800: #292524;
  --neutral-900: #1C1917;

  /* Semantic Colors */
  --success: #15803D;
  --error: #DC2626;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --overlay: var(--neutral-900);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --border-focus: var(--primary);

  /* Layout */
  --header-height: 64px;
  --container-width: 1120px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark mode overrides, keyed off the root data-theme attribute */
[data-theme="dark"] {
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --overlay: #0C0A09;

  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-400);

  --border: var(--neutral-700);
}"#;
