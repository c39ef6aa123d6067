//! WebView-based editor window using `wry` + `tao`.
//!
//! Architecture:
//! - The editor page is served via the `lf://` custom protocol with all
//!   CSS/JS inlined.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; every user action
//!   is one `{cmd, ...}` message.
//! - Rust pushes the full view state back with `evaluate_script` after
//!   each action — the page is a dumb projection of the controller.
//! - Modal capture (link name/url, category title) and the yes/no confirm
//!   step before deletes happen in the page; only confirmed, filled-in
//!   actions reach Rust.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::platform::SystemUrlOpener;
use crate::services::document_store::DocumentStoreTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::document::MoveDirection;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

struct EditorState {
    app: App,
}

// ─── Internal page ───

fn editor_html() -> String {
    let css = r#"
:root{--bg-canvas:#0d1117;--bg-default:#161b22;--bg-subtle:#1c2128;--fg-default:#e6edf3;--fg-muted:#7d8590;--border-default:#30363d;--accent-fg:#58a6ff;--accent-emphasis:#1f6feb;--success-emphasis:#238636;--danger-fg:#f85149;--danger-emphasis:#da3633;--radius:6px;--font:-apple-system,BlinkMacSystemFont,"Segoe UI","Noto Sans",Helvetica,Arial,sans-serif}
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:var(--font);background:var(--bg-canvas);color:var(--fg-default);height:100vh;display:flex;flex-direction:column;user-select:none}
.filebar{display:flex;gap:8px;align-items:center;padding:10px 12px;background:var(--bg-default);border-bottom:1px solid var(--border-default)}
.filebar input{flex:1;background:var(--bg-canvas);border:1px solid var(--border-default);border-radius:var(--radius);color:var(--fg-default);padding:6px 10px;font-size:13px}
.filebar .label{color:var(--fg-muted);font-size:12px;white-space:nowrap}
button{background:var(--bg-subtle);border:1px solid var(--border-default);border-radius:var(--radius);color:var(--fg-default);padding:6px 12px;font-size:13px;cursor:pointer}
button:hover{border-color:var(--fg-muted)}
button.primary{background:var(--success-emphasis);border-color:transparent}
button.danger{background:var(--danger-emphasis);border-color:transparent}
.panes{display:flex;flex:1;min-height:0}
.pane{display:flex;flex-direction:column;border-right:1px solid var(--border-default);min-width:0}
.pane.categories{flex:1}
.pane.links{flex:2;border-right:none}
.pane h2{font-size:13px;font-weight:600;color:var(--fg-muted);padding:8px 12px;border-bottom:1px solid var(--border-default)}
.list{flex:1;overflow-y:auto}
.row{display:flex;padding:7px 12px;font-size:13px;cursor:pointer;border-bottom:1px solid var(--bg-subtle);gap:12px}
.row:hover{background:var(--bg-subtle)}
.row.selected{background:var(--accent-emphasis)}
.row .name{flex:1;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.row .url{flex:1.5;color:var(--fg-muted);overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.row.selected .url{color:var(--fg-default)}
.buttons{display:flex;gap:6px;padding:8px 12px;border-top:1px solid var(--border-default)}
.overlay{position:fixed;inset:0;background:rgba(1,4,9,.6);display:none;align-items:center;justify-content:center}
.overlay.open{display:flex}
.dialog{background:var(--bg-default);border:1px solid var(--border-default);border-radius:var(--radius);padding:16px;min-width:380px}
.dialog h3{font-size:14px;margin-bottom:12px}
.dialog label{display:block;font-size:12px;color:var(--fg-muted);margin:8px 0 4px}
.dialog input{width:100%;background:var(--bg-canvas);border:1px solid var(--border-default);border-radius:var(--radius);color:var(--fg-default);padding:6px 10px;font-size:13px}
.dialog .actions{display:flex;gap:8px;justify-content:flex-end;margin-top:16px}
.dialog p{font-size:13px}
#toast{position:fixed;bottom:18px;left:50%;transform:translateX(-50%);background:var(--bg-subtle);border:1px solid var(--border-default);border-radius:var(--radius);padding:8px 16px;font-size:13px;opacity:0;transition:opacity .2s}
#toast.error{color:var(--danger-fg)}
"#;

    let body = r#"
<div class="filebar">
  <input id="file-path" type="text" placeholder="Path to bookmarks .json file" />
  <button onclick="loadFile()">Load JSON</button>
  <button onclick="saveFile()">Save JSON</button>
  <button onclick="saveAsFile()">Save As...</button>
  <span class="label" id="file-label">No file loaded</span>
</div>
<div class="panes">
  <div class="pane categories">
    <h2>Categories</h2>
    <div class="list" id="category-list"></div>
    <div class="buttons">
      <button class="primary" onclick="openCategoryDialog('add')">Add Category</button>
      <button onclick="openCategoryDialog('rename')">Rename</button>
      <button class="danger" onclick="confirmDeleteCategory()">Delete</button>
      <button onclick="send('move_category',{dir:-1})">Move Up</button>
      <button onclick="send('move_category',{dir:1})">Move Down</button>
    </div>
  </div>
  <div class="pane links">
    <h2>Links</h2>
    <div class="list" id="link-list"></div>
    <div class="buttons">
      <button class="primary" onclick="openLinkDialog('add')">Add Link</button>
      <button onclick="openLinkDialog('edit')">Edit</button>
      <button class="danger" onclick="confirmDeleteLink()">Delete</button>
      <button onclick="send('move_link',{dir:-1})">Move Up</button>
      <button onclick="send('move_link',{dir:1})">Move Down</button>
    </div>
  </div>
</div>
<div class="overlay" id="category-overlay">
  <div class="dialog">
    <h3 id="category-dialog-title">Add Category</h3>
    <label>Title:</label>
    <input id="category-title" type="text" />
    <div class="actions">
      <button onclick="closeDialogs()">Cancel</button>
      <button class="primary" onclick="submitCategoryDialog()">OK</button>
    </div>
  </div>
</div>
<div class="overlay" id="link-overlay">
  <div class="dialog">
    <h3 id="link-dialog-title">Add Link</h3>
    <label>Name:</label>
    <input id="link-name" type="text" />
    <label>URL:</label>
    <input id="link-url" type="text" />
    <div class="actions">
      <button onclick="closeDialogs()">Cancel</button>
      <button class="primary" onclick="submitLinkDialog()">OK</button>
    </div>
  </div>
</div>
<div class="overlay" id="confirm-overlay">
  <div class="dialog">
    <h3>Confirm Delete</h3>
    <p id="confirm-message"></p>
    <div class="actions">
      <button onclick="closeDialogs()">No</button>
      <button class="danger" id="confirm-yes">Yes</button>
    </div>
  </div>
</div>
<div id="toast"></div>
"#;

    let js = r#"
var state={categories:[],links:[],selectedCategory:null,selectedLink:null,fileName:null,filePath:null};
var dialogMode='add';
function send(cmd,args){var m=args||{};m.cmd=cmd;window.ipc.postMessage(JSON.stringify(m));}
window.__lf_applyState=function(d){
  state=d;
  var cl=document.getElementById('category-list');
  cl.innerHTML='';
  d.categories.forEach(function(title,i){
    var row=document.createElement('div');
    row.className='row'+(i===d.selectedCategory?' selected':'');
    var n=document.createElement('span');n.className='name';n.textContent=title;
    row.appendChild(n);
    row.addEventListener('click',function(){send('select_category',{index:i})});
    cl.appendChild(row);
  });
  var ll=document.getElementById('link-list');
  ll.innerHTML='';
  d.links.forEach(function(link,i){
    var row=document.createElement('div');
    row.className='row'+(i===d.selectedLink?' selected':'');
    var n=document.createElement('span');n.className='name';n.textContent=link[0];
    var u=document.createElement('span');u.className='url';u.textContent=link[1];
    row.appendChild(n);row.appendChild(u);
    row.addEventListener('click',function(){send('select_link',{index:i})});
    row.addEventListener('dblclick',function(){send('open_link',{})});
    ll.appendChild(row);
  });
  document.getElementById('file-label').textContent=d.fileName?('Loaded: '+d.fileName):'No file loaded';
  if(d.filePath)document.getElementById('file-path').value=d.filePath;
};
window.__lf_showToast=function(msg,isError){
  var t=document.getElementById('toast');
  t.textContent=msg;
  t.className=isError?'error':'';
  t.style.opacity=1;
  clearTimeout(t._timer);
  t._timer=setTimeout(function(){t.style.opacity=0},2500);
};
function closeDialogs(){
  document.querySelectorAll('.overlay').forEach(function(o){o.classList.remove('open')});
}
function openCategoryDialog(mode){
  if(mode==='rename'&&state.selectedCategory===null){send('rename_category',{title:''});return;}
  dialogMode=mode;
  document.getElementById('category-dialog-title').textContent=mode==='add'?'Add Category':'Rename Category';
  var input=document.getElementById('category-title');
  input.value=mode==='rename'?state.categories[state.selectedCategory]:'';
  document.getElementById('category-overlay').classList.add('open');
  input.focus();
}
function submitCategoryDialog(){
  var title=document.getElementById('category-title').value;
  closeDialogs();
  send(dialogMode==='add'?'add_category':'rename_category',{title:title});
}
function openLinkDialog(mode){
  if(state.selectedCategory===null){send(mode==='add'?'add_link':'edit_link',{name:'',url:''});return;}
  if(mode==='edit'&&state.selectedLink===null){send('edit_link',{name:'',url:''});return;}
  dialogMode=mode;
  document.getElementById('link-dialog-title').textContent=mode==='add'?'Add Link':'Edit Link';
  var name=document.getElementById('link-name'),url=document.getElementById('link-url');
  if(mode==='edit'){var row=state.links[state.selectedLink];name.value=row[0];url.value=row[1];}
  else{name.value='';url.value='';}
  document.getElementById('link-overlay').classList.add('open');
  name.focus();
}
function submitLinkDialog(){
  var name=document.getElementById('link-name').value;
  var url=document.getElementById('link-url').value;
  closeDialogs();
  send(dialogMode==='add'?'add_link':'edit_link',{name:name,url:url});
}
function confirmAction(message,cmd){
  document.getElementById('confirm-message').textContent=message;
  document.getElementById('confirm-yes').onclick=function(){closeDialogs();send(cmd,{})};
  document.getElementById('confirm-overlay').classList.add('open');
}
function confirmDeleteCategory(){
  if(state.selectedCategory===null){send('delete_category',{});return;}
  var title=state.categories[state.selectedCategory];
  confirmAction("Delete category '"+title+"' and all its links?",'delete_category');
}
function confirmDeleteLink(){
  if(state.selectedCategory===null||state.selectedLink===null){send('delete_link',{});return;}
  var name=state.links[state.selectedLink][0];
  confirmAction("Delete link '"+name+"'?",'delete_link');
}
function loadFile(){send('load_file',{path:document.getElementById('file-path').value});}
function saveFile(){send('save_file',{});}
function saveAsFile(){send('save_as',{path:document.getElementById('file-path').value});}
window.__lf_promptSaveAs=function(){
  __lf_showToast('No file selected — enter a path and use Save As',true);
  document.getElementById('file-path').focus();
};
document.addEventListener('keydown',function(e){if(e.key==='Escape')closeDialogs();});
send('ui_ready',{});
"#;

    let mut html = String::with_capacity(css.len() + body.len() + js.len() + 128);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(css);
    html.push_str("</style></head><body>");
    html.push_str(body);
    html.push_str("<script>");
    html.push_str(js);
    html.push_str("</script></body></html>");
    html
}

// ─── IPC handler ───

fn handle_ipc(state: &mut EditorState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => Some(UserEvent::EvalScript(build_state_update(state))),

        "select_category" => {
            if let Some(index) = msg.get("index").and_then(|v| v.as_u64()) {
                let _ = state.app.controller.select_category(index as usize);
            }
            Some(UserEvent::EvalScript(build_state_update(state)))
        }

        "select_link" => {
            if let Some(index) = msg.get("index").and_then(|v| v.as_u64()) {
                let _ = state.app.controller.select_link(index as usize);
            }
            Some(UserEvent::EvalScript(build_state_update(state)))
        }

        "add_category" => {
            let title = msg.get("title").and_then(|v| v.as_str()).unwrap_or("");
            let result = state.app.controller.add_category(title);
            report(state, result)
        }

        "rename_category" => {
            let title = msg.get("title").and_then(|v| v.as_str()).unwrap_or("");
            let result = state.app.controller.rename_selected_category(title);
            report(state, result)
        }

        "delete_category" => {
            let result = state.app.controller.delete_selected_category();
            report(state, result)
        }

        "move_category" => {
            let direction = parse_direction(&msg)?;
            let result = state.app.controller.move_selected_category(direction);
            report(state, result)
        }

        "add_link" => {
            let name = msg.get("name").and_then(|v| v.as_str()).unwrap_or("");
            let url = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let result = state.app.controller.add_link(name, url);
            report(state, result)
        }

        "edit_link" => {
            let name = msg.get("name").and_then(|v| v.as_str()).unwrap_or("");
            let url = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let result = state.app.controller.edit_selected_link(name, url);
            report(state, result)
        }

        "delete_link" => {
            let result = state.app.controller.delete_selected_link();
            report(state, result)
        }

        "move_link" => {
            let direction = parse_direction(&msg)?;
            let result = state.app.controller.move_selected_link(direction);
            report(state, result)
        }

        "open_link" => {
            match state.app.controller.open_selected_link(&SystemUrlOpener) {
                Ok(()) => None,
                Err(err) => Some(UserEvent::EvalScript(toast_script(&err.to_string(), true))),
            }
        }

        "load_file" => {
            let path = msg.get("path").and_then(|v| v.as_str()).unwrap_or("").trim();
            if path.is_empty() {
                return Some(UserEvent::EvalScript(toast_script(
                    "Enter a file path to load",
                    true,
                )));
            }
            match state.app.load_file(Path::new(path)) {
                Ok(()) => Some(UserEvent::EvalScript(format!(
                    "{};{}",
                    build_state_update(state),
                    toast_script("Bookmarks loaded successfully!", false)
                ))),
                Err(err) => Some(UserEvent::EvalScript(toast_script(&err.to_string(), true))),
            }
        }

        "save_file" => {
            use crate::types::errors::StoreError;
            match state.app.save_file() {
                Ok(()) => Some(UserEvent::EvalScript(toast_script(
                    "Bookmarks saved successfully!",
                    false,
                ))),
                // No current file yet — the page prompts for a save-as path.
                Err(StoreError::NoFile) => Some(UserEvent::EvalScript(
                    "if(window.__lf_promptSaveAs)__lf_promptSaveAs()".to_string(),
                )),
                Err(err) => Some(UserEvent::EvalScript(toast_script(&err.to_string(), true))),
            }
        }

        "save_as" => {
            let path = msg.get("path").and_then(|v| v.as_str()).unwrap_or("").trim();
            if path.is_empty() {
                return Some(UserEvent::EvalScript(toast_script(
                    "Enter a file path to save to",
                    true,
                )));
            }
            let path = default_json_extension(path);
            match state.app.save_file_as(&path) {
                Ok(()) => Some(UserEvent::EvalScript(format!(
                    "{};{}",
                    build_state_update(state),
                    toast_script("Bookmarks saved successfully!", false)
                ))),
                Err(err) => Some(UserEvent::EvalScript(toast_script(&err.to_string(), true))),
            }
        }

        _ => None,
    }
}

/// Reports a controller action: errors become a toast, and the view state
/// is re-pushed either way so the page always mirrors the model.
fn report(
    state: &EditorState,
    result: Result<(), crate::types::errors::ControllerError>,
) -> Option<UserEvent> {
    let script = match result {
        Ok(()) => build_state_update(state),
        Err(err) => format!(
            "{};{}",
            build_state_update(state),
            toast_script(&err.to_string(), true)
        ),
    };
    Some(UserEvent::EvalScript(script))
}

fn parse_direction(msg: &serde_json::Value) -> Option<MoveDirection> {
    match msg.get("dir").and_then(|v| v.as_i64())? {
        -1 => Some(MoveDirection::Up),
        1 => Some(MoveDirection::Down),
        _ => None,
    }
}

/// Appends `.json` when the typed path has no extension.
fn default_json_extension(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.extension().is_none() {
        path.with_extension("json")
    } else {
        path
    }
}

fn build_state_update(state: &EditorState) -> String {
    let controller = &state.app.controller;
    let payload = serde_json::json!({
        "categories": controller.category_titles(),
        "links": controller.link_rows(),
        "selectedCategory": controller.selected_category(),
        "selectedLink": controller.selected_link(),
        "fileName": state.app.store.file_name(),
        "filePath": state.app.store.file_path().map(|p| p.to_string_lossy()),
    });
    format!("if(window.__lf_applyState)__lf_applyState({})", payload)
}

fn toast_script(message: &str, is_error: bool) -> String {
    format!(
        "if(window.__lf_showToast)__lf_showToast({},{})",
        serde_json::json!(message),
        is_error
    )
}


// ─── Main entry point ───

pub fn run() {
    let mut app = App::new();
    app.startup();
    let window_size = app.settings_engine.settings().window.clone();
    let state = Arc::new(Mutex::new(EditorState { app }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Linkshelf")
        .with_inner_size(tao::dpi::LogicalSize::new(
            window_size.width as f64,
            window_size.height as f64,
        ))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("lf".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(editor_html().into_bytes().into())
                .unwrap()
        })
        .with_url("lf://localhost/editor")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            eprintln!("[IPC] {}", &body[..body.len().min(200)]);
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                let mut s = state.lock().unwrap();
                s.app.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }

            _ => {}
        }
    });
}
