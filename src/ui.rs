pub fn render_index() -> String {
    INDEX_HTML.to_string()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance Tracker</title>
  <style>
    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      font-family: "Trebuchet MS", sans-serif;
      background: #f6f3ec;
      color: #2b2a28;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: #fff;
      border-radius: 18px;
      padding: 28px;
      display: grid;
      gap: 22px;
    }

    .task {
      display: flex;
      justify-content: space-between;
      padding: 8px 0;
      border-bottom: 1px solid #eee;
    }

    .hidden {
      display: none;
    }

    #calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekday {
      font-weight: 600;
      text-align: center;
    }

    .dateCell {
      padding: 10px 0;
      text-align: center;
      border-radius: 8px;
      background: #cdebd3;
      cursor: pointer;
    }

    .dateCell.absent {
      background: #f3c2bb;
    }

    .status[data-type="error"] {
      color: #b3261e;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Attendance Tracker</h1>
    </header>
    <form id="task-form">
      <input id="task-input" type="text" placeholder="New task" />
      <button type="submit">Add</button>
    </form>
    <section id="task-list"></section>
    <section id="calendar-section" class="hidden">
      <h2 id="selected-title"></h2>
      <select id="month-select"></select>
      <select id="year-select"></select>
      <div id="calendar"></div>
      <p id="summary"></p>
    </section>
    <div class="status" id="status"></div>
  </main>
  <script>
    const taskForm = document.getElementById('task-form');
    const taskInput = document.getElementById('task-input');
    const taskList = document.getElementById('task-list');
    const calendarSection = document.getElementById('calendar-section');
    const selectedTitle = document.getElementById('selected-title');
    const monthSelect = document.getElementById('month-select');
    const yearSelect = document.getElementById('year-select');
    const calendarEl = document.getElementById('calendar');
    const summaryEl = document.getElementById('summary');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const postJson = (url, body) => request(url, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const renderTasks = (data) => {
      taskList.innerHTML = '';
      data.tasks.forEach((task) => {
        const row = document.createElement('div');
        row.className = 'task';
        const name = document.createElement('span');
        name.textContent = task;
        const actions = document.createElement('div');
        const select = document.createElement('button');
        select.textContent = 'Open';
        select.addEventListener('click', () => selectTask(task).catch((err) => setStatus(err.message, 'error')));
        const remove = document.createElement('button');
        remove.textContent = 'Delete';
        remove.addEventListener('click', () => deleteTask(task).catch((err) => setStatus(err.message, 'error')));
        actions.append(select, remove);
        row.append(name, actions);
        taskList.appendChild(row);
      });
      if (!data.selected) {
        calendarSection.classList.add('hidden');
      }
    };

    const renderCalendar = (view) => {
      selectedTitle.textContent = view.task;
      calendarSection.classList.remove('hidden');
      monthSelect.value = view.month;
      yearSelect.value = view.year;
      calendarEl.innerHTML = '';
      view.weekdays.forEach((label) => {
        const cell = document.createElement('div');
        cell.className = 'weekday';
        cell.textContent = label;
        calendarEl.appendChild(cell);
      });
      for (let i = 0; i < view.leading_blanks; i += 1) {
        calendarEl.appendChild(document.createElement('div'));
      }
      view.days.forEach((day) => {
        const cell = document.createElement('div');
        cell.className = day.present ? 'dateCell' : 'dateCell absent';
        cell.textContent = day.day;
        cell.addEventListener('click', () => {
          postJson('/api/toggle', { date_key: day.date_key })
            .then(renderCalendar)
            .catch((err) => setStatus(err.message, 'error'));
        });
        calendarEl.appendChild(cell);
      });
      summaryEl.textContent = view.summary;
    };

    const selectedMonth = () => ({
      year: parseInt(yearSelect.value, 10),
      month: parseInt(monthSelect.value, 10)
    });

    const selectTask = async (task) => {
      renderCalendar(await postJson('/api/select', { task, ...selectedMonth() }));
    };

    const deleteTask = async (task) => {
      if (!confirm(`Are you sure you want to delete the task "${task}"?`)) {
        return;
      }
      renderTasks(await request(`/api/tasks/${encodeURIComponent(task)}?confirm=true`, { method: 'DELETE' }));
    };

    const reloadCalendar = async () => {
      const { year, month } = selectedMonth();
      renderCalendar(await request(`/api/calendar?year=${year}&month=${month}`));
    };

    const loadOptions = async () => {
      const options = await request('/api/options');
      options.months.forEach((name, index) => monthSelect.add(new Option(name, index)));
      options.years.forEach((year) => yearSelect.add(new Option(year, year)));
      monthSelect.value = options.current_month;
      yearSelect.value = options.current_year;
    };

    taskForm.addEventListener('submit', (event) => {
      event.preventDefault();
      postJson('/api/tasks', { name: taskInput.value })
        .then((data) => {
          taskInput.value = '';
          renderTasks(data);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    monthSelect.addEventListener('change', () => reloadCalendar().catch((err) => setStatus(err.message, 'error')));
    yearSelect.addEventListener('change', () => reloadCalendar().catch((err) => setStatus(err.message, 'error')));

    loadOptions()
      .then(() => request('/api/tasks'))
      .then(renderTasks)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
