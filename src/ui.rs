pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>OJT Diary</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f7f3;
      --bg-2: #d7e8d0;
      --ink: #22302a;
      --accent: #22c55e;
      --accent-2: #2f4858;
      --warn: #f59e0b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f4e4 60%, #f3f7ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", serif;
      font-size: 30px;
      margin: 0;
    }

    .muted {
      color: rgba(34, 48, 42, 0.6);
      font-size: 14px;
    }

    .tabs {
      display: flex;
      gap: 8px;
    }

    .tab {
      border: 1px solid rgba(47, 72, 88, 0.25);
      background: transparent;
      color: var(--accent-2);
      border-radius: 999px;
      padding: 8px 18px;
      font: inherit;
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent-2);
      color: white;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(190px, 1fr));
      gap: 16px;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px 20px;
      box-shadow: 0 10px 30px rgba(47, 72, 88, 0.08);
    }

    .card .value {
      font-size: 30px;
      font-weight: 600;
    }

    .card .label {
      font-size: 13px;
      color: rgba(34, 48, 42, 0.6);
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.12);
      overflow: hidden;
      margin-top: 10px;
    }

    .bar > span {
      display: block;
      height: 100%;
      background: var(--accent);
    }

    .week-chart {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 10px;
      align-items: end;
      min-height: 140px;
    }

    .week-col {
      display: grid;
      gap: 6px;
      justify-items: center;
      font-size: 12px;
    }

    .week-bar {
      width: 26px;
      border-radius: 8px 8px 0 0;
      background: var(--accent);
    }

    .week-bar.short {
      background: var(--warn);
    }

    .category-row {
      display: grid;
      grid-template-columns: 1fr 3fr auto;
      gap: 12px;
      align-items: center;
      padding: 8px 0;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 14px;
    }

    th, td {
      text-align: left;
      padding: 10px 8px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    .pill {
      border-radius: 999px;
      padding: 3px 10px;
      font-size: 12px;
      background: rgba(47, 72, 88, 0.1);
    }

    .pill.completed { background: rgba(34, 197, 94, 0.18); }
    .pill.in-progress { background: rgba(245, 158, 11, 0.2); }

    form.entry-form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 12px;
    }

    form.entry-form label {
      display: grid;
      gap: 4px;
      font-size: 12px;
      color: rgba(34, 48, 42, 0.7);
    }

    input, select, textarea {
      font: inherit;
      padding: 9px 10px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.25);
      background: white;
    }

    textarea {
      grid-column: 1 / -1;
      min-height: 64px;
      resize: vertical;
    }

    .actions {
      grid-column: 1 / -1;
      display: flex;
      gap: 10px;
      align-items: center;
    }

    button.primary {
      background: var(--accent);
      border: none;
      color: white;
      border-radius: 12px;
      padding: 10px 22px;
      font: inherit;
      cursor: pointer;
    }

    button.ghost {
      background: transparent;
      border: 1px solid rgba(47, 72, 88, 0.25);
      color: var(--accent-2);
      border-radius: 12px;
      padding: 10px 16px;
      font: inherit;
      cursor: pointer;
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .calendar-grid .head {
      text-align: center;
      font-size: 12px;
      color: rgba(34, 48, 42, 0.6);
      padding: 4px 0;
    }

    .day-cell {
      min-height: 64px;
      border-radius: 12px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.1);
      padding: 6px;
      font-size: 12px;
    }

    .day-cell.outside {
      opacity: 0.35;
    }

    .day-cell.today {
      border-color: var(--accent);
      box-shadow: inset 0 0 0 1px var(--accent);
    }

    .day-cell .dot {
      display: inline-block;
      width: 7px;
      height: 7px;
      border-radius: 50%;
      background: var(--accent);
      margin-right: 2px;
    }

    .status-line {
      min-height: 18px;
      font-size: 13px;
    }

    .status-line.error { color: #dc2626; }
    .status-line.ok { color: var(--accent); }

    section[hidden] {
      display: none;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>OJT Diary</h1>
        <p class="muted">Today is {{TODAY}}. Log your training, watch the streak grow.</p>
      </div>
      <nav class="tabs" role="tablist">
        <button class="tab active" data-tab="dashboard" aria-selected="true">Dashboard</button>
        <button class="tab" data-tab="entries" aria-selected="false">Entries</button>
        <button class="tab" data-tab="calendar" aria-selected="false">Calendar</button>
      </nav>
    </header>

    <div class="status-line" id="status"></div>

    <section id="panel-dashboard">
      <div class="cards">
        <div class="card">
          <div class="value" id="m-progress">0%</div>
          <div class="label">Overall progress</div>
          <div class="bar"><span id="m-progress-bar" style="width:0%"></span></div>
        </div>
        <div class="card">
          <div class="value" id="m-hours">0h</div>
          <div class="label" id="m-hours-label">of 500h target</div>
          <div class="bar"><span id="m-hours-bar" style="width:0%"></span></div>
        </div>
        <div class="card">
          <div class="value" id="m-tasks">0/0</div>
          <div class="label" id="m-rate">0% completion rate</div>
        </div>
        <div class="card">
          <div class="value" id="m-streak">0 days</div>
          <div class="label" id="m-last-active">No activity yet</div>
        </div>
      </div>

      <div class="card" style="margin-top:16px">
        <h3 style="margin-top:0">Weekly hours</h3>
        <div class="week-chart" id="week-chart"></div>
      </div>

      <div class="card" style="margin-top:16px">
        <h3 style="margin-top:0">Category progress</h3>
        <div id="category-list"></div>
      </div>
    </section>

    <section id="panel-entries" hidden>
      <div class="card">
        <h3 style="margin-top:0" id="form-title">New entry</h3>
        <form class="entry-form" id="entry-form">
          <label>Title
            <input name="title" required placeholder="What did you work on?" />
          </label>
          <label>Date
            <input name="date" type="date" required value="{{TODAY}}" />
          </label>
          <label>Hours
            <input name="hours" type="number" min="0" max="24" step="0.5" value="4" />
          </label>
          <label>Status
            <select name="status">
              <option value="pending">Pending</option>
              <option value="in-progress">In progress</option>
              <option value="completed">Completed</option>
            </select>
          </label>
          <label>Supervisor
            <input name="supervisor" placeholder="Optional" />
          </label>
          <label>Skills (comma separated)
            <input name="skills" placeholder="React.js, SQL" />
          </label>
          <textarea name="description" placeholder="Notes about the activity"></textarea>
          <div class="actions">
            <button class="primary" type="submit" id="form-submit">Save entry</button>
            <button class="ghost" type="button" id="form-reset">Clear</button>
          </div>
        </form>
      </div>

      <div class="card" style="margin-top:16px">
        <table>
          <thead>
            <tr><th>Date</th><th>Title</th><th>Hours</th><th>Status</th><th></th></tr>
          </thead>
          <tbody id="entry-rows"></tbody>
        </table>
      </div>
    </section>

    <section id="panel-calendar" hidden>
      <div class="card">
        <div style="display:flex;justify-content:space-between;align-items:center">
          <button class="ghost" id="cal-prev">&larr;</button>
          <h3 id="cal-title" style="margin:0"></h3>
          <button class="ghost" id="cal-next">&rarr;</button>
        </div>
        <div class="calendar-grid" id="calendar-grid" style="margin-top:12px"></div>
      </div>
    </section>
  </main>

  <script>
    const OWNER = localStorage.getItem('ojt-owner') || 'me';
    localStorage.setItem('ojt-owner', OWNER);

    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = {
      dashboard: document.getElementById('panel-dashboard'),
      entries: document.getElementById('panel-entries'),
      calendar: document.getElementById('panel-calendar')
    };
    const form = document.getElementById('entry-form');
    const formTitle = document.getElementById('form-title');
    const submitBtn = document.getElementById('form-submit');
    let editingId = null;
    let calCursor = new Date('{{TODAY}}T00:00:00');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.className = 'status-line' + (type ? ' ' + type : '');
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const renderMetrics = (m) => {
      document.getElementById('m-progress').textContent = m.overall_progress_pct + '%';
      document.getElementById('m-progress-bar').style.width = m.overall_progress_pct + '%';
      document.getElementById('m-hours').textContent = m.total_hours + 'h';
      document.getElementById('m-hours-label').textContent = 'of ' + m.target_hours + 'h target';
      document.getElementById('m-hours-bar').style.width = m.overall_progress_pct + '%';
      document.getElementById('m-tasks').textContent = m.completed_count + '/' + m.total_entries;
      document.getElementById('m-rate').textContent = m.completion_rate + '% completion rate';
      document.getElementById('m-streak').textContent = m.streak_days + ' day' + (m.streak_days === 1 ? '' : 's');
      document.getElementById('m-last-active').textContent =
        m.last_active ? 'Last active ' + m.last_active : 'No activity yet';

      const chart = document.getElementById('week-chart');
      chart.innerHTML = '';
      m.weekly_buckets.forEach((bucket) => {
        const col = document.createElement('div');
        col.className = 'week-col';
        const bar = document.createElement('div');
        bar.className = 'week-bar' + (bucket.hours < bucket.target ? ' short' : '');
        bar.style.height = Math.min(110, bucket.hours * 12) + 'px';
        bar.title = bucket.hours + 'h / ' + bucket.target + 'h';
        col.append(bar, Object.assign(document.createElement('span'), { textContent: bucket.day }),
          Object.assign(document.createElement('span'), { textContent: bucket.hours + 'h' }));
        chart.appendChild(col);
      });

      const list = document.getElementById('category-list');
      list.innerHTML = '';
      m.category_buckets.forEach((bucket) => {
        const row = document.createElement('div');
        row.className = 'category-row';
        const bar = document.createElement('div');
        bar.className = 'bar';
        const fill = document.createElement('span');
        fill.style.width = bucket.completion_pct + '%';
        bar.appendChild(fill);
        row.append(
          Object.assign(document.createElement('span'), { textContent: bucket.label }),
          bar,
          Object.assign(document.createElement('span'), { textContent: bucket.completion_pct + '%' })
        );
        list.appendChild(row);
      });
    };

    const renderEntries = (entries) => {
      const rows = document.getElementById('entry-rows');
      rows.innerHTML = '';
      entries
        .slice()
        .sort((a, b) => b.date.localeCompare(a.date))
        .forEach((entry) => {
          const tr = document.createElement('tr');
          const pill = '<span class="pill ' + entry.status + '">' + entry.status + '</span>';
          tr.innerHTML =
            '<td>' + entry.date + '</td>' +
            '<td>' + entry.title + '</td>' +
            '<td>' + entry.hours + 'h</td>' +
            '<td>' + pill + '</td>';
          const actions = document.createElement('td');
          const edit = document.createElement('button');
          edit.className = 'ghost';
          edit.textContent = 'Edit';
          edit.onclick = () => startEdit(entry);
          const del = document.createElement('button');
          del.className = 'ghost';
          del.textContent = 'Delete';
          del.onclick = () => removeEntry(entry.id);
          actions.append(edit, del);
          tr.appendChild(actions);
          rows.appendChild(tr);
        });
    };

    const renderCalendar = (cells) => {
      const grid = document.getElementById('calendar-grid');
      grid.innerHTML = '';
      ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'].forEach((name) => {
        const head = document.createElement('div');
        head.className = 'head';
        head.textContent = name;
        grid.appendChild(head);
      });
      cells.forEach((cell) => {
        const el = document.createElement('div');
        el.className = 'day-cell'
          + (cell.in_current_month ? '' : ' outside')
          + (cell.is_today ? ' today' : '');
        el.innerHTML = '<div>' + cell.day + '</div>'
          + cell.entries.map(() => '<span class="dot"></span>').join('');
        if (cell.entries.length > 0) {
          el.title = cell.entries.map((e) => e.title + ' (' + e.hours + 'h)').join('\n');
        }
        grid.appendChild(el);
      });
      document.getElementById('cal-title').textContent =
        calCursor.toLocaleString('en', { month: 'long', year: 'numeric' });
    };

    const loadDashboard = () =>
      api('/api/metrics?owner=' + encodeURIComponent(OWNER)).then(renderMetrics);

    const loadEntries = () =>
      api('/api/entries?owner=' + encodeURIComponent(OWNER)).then(renderEntries);

    const loadCalendar = () =>
      api('/api/calendar?owner=' + encodeURIComponent(OWNER)
        + '&year=' + calCursor.getFullYear()
        + '&month=' + (calCursor.getMonth() + 1)).then(renderCalendar);

    const refresh = () => Promise.all([loadDashboard(), loadEntries(), loadCalendar()]);

    const payloadFromForm = () => {
      const fields = new FormData(form);
      return {
        title: fields.get('title'),
        description: fields.get('description') || '',
        date: fields.get('date'),
        status: fields.get('status'),
        hours: Number(fields.get('hours')) || 0,
        supervisor: fields.get('supervisor') || null,
        skills: (fields.get('skills') || '').split(',').map((s) => s.trim()).filter(Boolean),
        owner_id: OWNER
      };
    };

    const startEdit = (entry) => {
      editingId = entry.id;
      formTitle.textContent = 'Edit entry';
      submitBtn.textContent = 'Update entry';
      form.title.value = entry.title;
      form.date.value = entry.date;
      form.hours.value = entry.hours;
      form.status.value = entry.status;
      form.supervisor.value = entry.supervisor || '';
      form.skills.value = (entry.skills || []).join(', ');
      form.description.value = entry.description || '';
      setActiveTab('entries');
    };

    const resetForm = () => {
      editingId = null;
      formTitle.textContent = 'New entry';
      submitBtn.textContent = 'Save entry';
      form.reset();
      form.date.value = '{{TODAY}}';
    };

    const removeEntry = async (id) => {
      try {
        await api('/api/entries/' + id, { method: 'DELETE' });
        setStatus('Entry deleted', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      setStatus('Saving...', '');
      try {
        const payload = payloadFromForm();
        if (editingId) {
          await api('/api/entries/' + editingId, {
            method: 'PUT',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(payload)
          });
        } else {
          await api('/api/entries', {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(payload)
          });
        }
        resetForm();
        setStatus('Saved', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('form-reset').addEventListener('click', resetForm);

    document.getElementById('cal-prev').addEventListener('click', () => {
      calCursor.setMonth(calCursor.getMonth() - 1);
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('cal-next').addEventListener('click', () => {
      calCursor.setMonth(calCursor.getMonth() + 1);
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    });

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      Object.entries(panels).forEach(([name, panel]) => {
        panel.hidden = name !== tab;
      });
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
