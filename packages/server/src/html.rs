//! Embedded dashboard page.
//!
//! A single static HTML asset: the page fetches the filter option lists from
//! `/api/filters`, builds the four controls, and points the map iframe at
//! `/api/map` with the current selection. Styling follows the original
//! dashboard: solarized dark background with light-yellow labels.

pub const DASHBOARD_HTML: &str = r#"<!doctype html>
<html lang="es">

<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mapa de Calor para Casos de Suicidio en Colombia entre 2016 y 2019</title>
  <style>
    body {
      background: #002b36;
      color: #839496;
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      margin: 20px;
    }

    h1 {
      color: #FFFFE0;
      font-size: 28px;
      margin-bottom: 8px;
    }

    a.data-link {
      color: #FFFFE0;
      float: right;
      font-size: 12px;
      margin: 10px;
    }

    label.control-label {
      color: #FFFFE0;
      display: block;
      margin-top: 10px;
      margin-bottom: 4px;
    }

    .controls-row {
      display: flex;
      gap: 20px;
    }

    .controls-col {
      flex: 1;
    }

    select[multiple] {
      background: #073642;
      border: 1px solid #586e75;
      color: #eee8d5;
      min-height: 96px;
      padding: 4px;
      width: 100%;
    }

    .toggle-group {
      margin-bottom: 20px;
    }

    .toggle-group label.switch {
      color: #FFFFE0;
      display: inline-flex;
      align-items: center;
      gap: 6px;
      margin-right: 15px;
      margin-top: 6px;
      cursor: pointer;
    }

    .switch input {
      appearance: none;
      width: 34px;
      height: 18px;
      border-radius: 9px;
      background: #586e75;
      position: relative;
      outline: none;
      cursor: pointer;
    }

    .switch input::before {
      content: '';
      position: absolute;
      top: 2px;
      left: 2px;
      width: 14px;
      height: 14px;
      border-radius: 50%;
      background: #eee8d5;
      transition: left 0.15s ease;
    }

    .switch input:checked {
      background: #2aa198;
    }

    .switch input:checked::before {
      left: 18px;
    }

    #map-container {
      margin-top: 30px;
      width: 70%;
      height: 630px;
      margin-left: auto;
      margin-right: auto;
      float: left;
    }

    #map-frame {
      width: 100%;
      height: 100%;
      border: 0;
    }
  </style>
</head>

<body>
  <a class="data-link"
    href="https://www.datos.gov.co/Justicia-y-Derecho/Suicidios-Colombia-a-os-2016-a-2019/f75u-mirk/about_data">Datos
    Abiertos: Suicidio</a>
  <h1>Mapa de Calor para Casos de Suicidio en Colombia entre 2016 y 2019</h1>

  <div class="controls-row">
    <div class="controls-col">
      <label class="control-label" for="departamento-select">Departamento</label>
      <select id="departamento-select" multiple></select>
    </div>
    <div class="controls-col">
      <label class="control-label" for="sexo-select">Sexo de la victima</label>
      <select id="sexo-select" multiple style="width: 60%"></select>
    </div>
  </div>

  <div class="toggle-group">
    <label class="control-label">Día del hecho</label>
    <span id="dia-toggle"></span>
  </div>

  <div class="toggle-group">
    <label class="control-label">Grupo de edad de la victima</label>
    <span id="edad-toggle"></span>
  </div>

  <div id="map-container">
    <iframe id="map-frame" src="about:blank"></iframe>
  </div>

  <script>
    function fillSelect(id, values) {
      const select = document.getElementById(id);
      for (const value of values) {
        const option = document.createElement('option');
        option.value = value;
        option.textContent = value;
        select.appendChild(option);
      }
      const all = document.createElement('option');
      all.value = 'All';
      all.textContent = 'All';
      all.selected = true;
      select.appendChild(all);
      select.addEventListener('change', refreshMap);
    }

    function fillToggles(id, values) {
      const group = document.getElementById(id);
      for (const value of values) {
        const label = document.createElement('label');
        label.className = 'switch';
        const input = document.createElement('input');
        input.type = 'checkbox';
        input.value = value;
        input.addEventListener('change', refreshMap);
        label.appendChild(input);
        label.appendChild(document.createTextNode(value));
        group.appendChild(label);
      }
    }

    function selectedValues(id) {
      return Array.from(document.getElementById(id).selectedOptions).map((o) => o.value);
    }

    function toggledValues(id) {
      return Array.from(document.querySelectorAll('#' + id + ' input:checked')).map((i) => i.value);
    }

    function refreshMap() {
      const params = new URLSearchParams();
      params.set('departments', selectedValues('departamento-select').join(','));
      params.set('sexes', selectedValues('sexo-select').join(','));
      params.set('days', toggledValues('dia-toggle').join(','));
      params.set('ages', toggledValues('edad-toggle').join(','));
      document.getElementById('map-frame').src = '/api/map?' + params.toString();
    }

    async function init() {
      const response = await fetch('/api/filters');
      const options = await response.json();
      fillSelect('departamento-select', options.departments);
      fillSelect('sexo-select', options.sexes);
      fillToggles('dia-toggle', options.days);
      fillToggles('edad-toggle', options.ageBrackets);
      refreshMap();
    }

    init();
  </script>
</body>

</html>
"#;
