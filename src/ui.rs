use crate::models::DisplayState;

pub fn render_index(display: &DisplayState) -> String {
    INDEX_HTML
        .replace("{{SELECTED_DATE}}", &escape(&display.selected_date))
        .replace("{{BUTTON_LABEL}}", &escape(&display.button_label))
        .replace("{{BUTTON_DISABLED}}", if display.button_enabled { "" } else { "disabled" })
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>On This Day</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .fields {
      display: grid;
      grid-template-columns: 2fr 1fr 1fr auto;
      gap: 12px;
    }

    select {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 14px;
      padding: 14px 16px;
      font: inherit;
      background: white;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 24px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    button:disabled {
      background: #b9b3ab;
      box-shadow: none;
      cursor: progress;
    }

    #selectedDate {
      color: var(--accent-2);
      font-weight: 500;
    }

    #errorMessage {
      display: none;
      color: #b3261e;
      font-size: 0.95rem;
    }

    #imageContainer {
      display: grid;
      gap: 12px;
      justify-items: center;
    }

    .generated-image {
      max-width: 100%;
      border-radius: 18px;
      box-shadow: var(--shadow);
    }

    .image-title {
      font-size: 0.95rem;
      color: #5f5c57;
      text-align: center;
    }

    @media (max-width: 560px) {
      .fields {
        grid-template-columns: 1fr 1fr 1fr;
      }

      .fields button {
        grid-column: 1 / -1;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>On This Day</h1>
      <p class="subtitle">Pick a date, get a moment from history painted in the art of its year.</p>
    </header>

    <section class="fields">
      <select id="year" aria-label="Year"></select>
      <select id="month" aria-label="Month"></select>
      <select id="day" aria-label="Day"></select>
      <button id="enterButton" type="button" {{BUTTON_DISABLED}}>{{BUTTON_LABEL}}</button>
    </section>

    <div id="selectedDate">{{SELECTED_DATE}}</div>
    <div id="errorMessage" role="alert"></div>
    <div id="imageContainer"></div>
  </main>

  <script>
    const yearSelect = document.getElementById('year');
    const monthSelect = document.getElementById('month');
    const daySelect = document.getElementById('day');
    const selectedDateEl = document.getElementById('selectedDate');
    const enterButton = document.getElementById('enterButton');
    const errorEl = document.getElementById('errorMessage');
    const imageContainer = document.getElementById('imageContainer');

    const sleep = (ms) => new Promise((resolve) => setTimeout(resolve, ms));

    const fillSelect = (select, placeholder, options, value) => {
      // Rebuilding a select closes it under the user, so only touch what changed.
      const key = JSON.stringify(options);
      if (select.dataset.options !== key) {
        select.innerHTML = '';
        const first = document.createElement('option');
        first.value = '';
        first.textContent = placeholder;
        select.appendChild(first);
        options.forEach((text) => {
          const option = document.createElement('option');
          option.value = text;
          option.textContent = text;
          select.appendChild(option);
        });
        select.dataset.options = key;
      }
      if (select.value !== value) {
        select.value = value;
      }
    };

    const apply = (view) => {
      fillSelect(yearSelect, 'YYYY', view.year_options, view.year);
      fillSelect(monthSelect, 'MM', view.month_options, view.month);
      fillSelect(daySelect, 'DD', view.day_options, view.day);

      selectedDateEl.textContent = view.selected_date;

      if (view.error) {
        errorEl.textContent = view.error;
        errorEl.style.display = 'block';
      } else {
        errorEl.textContent = '';
        errorEl.style.display = 'none';
      }

      enterButton.textContent = view.button_label;
      enterButton.disabled = !view.button_enabled;
      document.body.style.cursor = view.busy ? 'progress' : 'auto';

      imageContainer.innerHTML = '';
      if (view.image) {
        const img = document.createElement('img');
        img.src = view.image.url;
        img.alt = view.image.alt;
        img.className = 'generated-image';

        const title = document.createElement('div');
        title.className = 'image-title';
        title.textContent = view.image.caption;

        imageContainer.appendChild(img);
        imageContainer.appendChild(title);
      }
    };

    const showProblem = (message) => {
      errorEl.textContent = message;
      errorEl.style.display = 'block';
    };

    const refresh = async () => {
      const res = await fetch('/api/view');
      if (!res.ok) {
        throw new Error('Unable to load view');
      }
      apply(await res.json());
    };

    const setField = async (field, value) => {
      const res = await fetch('/api/date', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ field, value })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      apply(await res.json());
    };

    const trigger = async () => {
      if (enterButton.disabled) {
        return;
      }

      let settled = false;
      const request = fetch('/api/trigger', { method: 'POST' }).finally(() => {
        settled = true;
      });

      // Pick up the Wait state while the lookup runs. A poll answered after the
      // trigger response is stale and must not be drawn.
      const polling = (async () => {
        while (!settled) {
          try {
            const poll = await fetch('/api/view');
            const view = poll.ok ? await poll.json() : null;
            if (view && !settled) {
              apply(view);
            }
          } catch (_) {}
          if (!settled) {
            await sleep(300);
          }
        }
      })();

      const res = await request;
      await polling;
      if (res.status === 409) {
        await refresh();
        return;
      }
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      apply(await res.json());
    };

    yearSelect.addEventListener('change', () => {
      setField('year', yearSelect.value).catch((err) => showProblem(err.message));
    });

    monthSelect.addEventListener('change', () => {
      setField('month', monthSelect.value).catch((err) => showProblem(err.message));
    });

    daySelect.addEventListener('change', () => {
      setField('day', daySelect.value).catch((err) => showProblem(err.message));
    });

    enterButton.addEventListener('click', () => {
      trigger().catch((err) => showProblem(err.message));
    });

    document.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        event.preventDefault();
        trigger().catch((err) => showProblem(err.message));
      }
    });

    refresh().catch((err) => showProblem(err.message));
  </script>
</body>
</html>
"#;
