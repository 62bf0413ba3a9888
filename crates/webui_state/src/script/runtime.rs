//! Client runtime template
//!
//! The runtime reads its configuration from properties assigned after the
//! object is created, so one template serves every configuration.

/// Global object name the runtime is published under
pub const RUNTIME_OBJECT: &str = "WebUIStateManager";

/// Attribute marking DOM elements bound to a state id
pub const BINDING_ATTRIBUTE: &str = "data-webui-state";

/// Default WebSocket endpoint for server sync
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:8080/ws";

/// Prefix for persisted storage keys
pub const STORAGE_PREFIX: &str = "webui:";

pub(crate) const RUNTIME: &str = r#"const WebUIStateManager = (function() {
  const states = new Map();
  const listeners = new Map();
  const elements = new Map();
  const history = [];
  let socket = null;

  function storage() {
    if (!manager.enablePersistence) return null;
    try {
      if (manager.storageType === 'localStorage') return window.localStorage;
      if (manager.storageType === 'sessionStorage') return window.sessionStorage;
    } catch (error) {
      console.error('WebUI: storage unavailable', error);
    }
    return null;
  }

  function persist(id, value) {
    const store = storage();
    if (!store) return;
    try {
      store.setItem('webui:' + id, JSON.stringify(value));
    } catch (error) {
      console.error('WebUI: failed to persist state', id, error);
    }
  }

  function restore(id) {
    const store = storage();
    if (!store) return undefined;
    try {
      const saved = store.getItem('webui:' + id);
      return saved === null ? undefined : JSON.parse(saved);
    } catch (error) {
      console.error('WebUI: failed to restore state', id, error);
      return undefined;
    }
  }

  function record(id, previous, value) {
    if (!manager.enableDebugging) return;
    const cap = manager.maxDebugHistory;
    if (cap <= 0) return;
    history.push({ id: id, previous: previous, value: value, timestamp: Date.now() });
    while (history.length > cap) {
      history.shift();
    }
  }

  const manager = {
    enablePersistence: false,
    enableDebugging: false,
    storageType: 'memory',
    maxDebugHistory: 100,

    createState: function(id, initialValue) {
      const saved = restore(id);
      states.set(id, saved === undefined ? initialValue : saved);
      if (!listeners.has(id)) listeners.set(id, []);
      if (!elements.has(id)) elements.set(id, []);
    },

    getState: function(id) {
      return states.get(id);
    },

    setState: function(id, value) {
      const previous = states.get(id);
      states.set(id, value);
      record(id, previous, value);
      persist(id, value);
      this.updateDOM(id, value);
      this.notifyListeners(id, value);
    },

    subscribe: function(id, callback) {
      if (!listeners.has(id)) listeners.set(id, []);
      listeners.get(id).push(callback);
      return callback;
    },

    unsubscribe: function(id, callback) {
      const callbacks = listeners.get(id);
      if (!callbacks) return false;
      const index = callbacks.indexOf(callback);
      if (index === -1) return false;
      callbacks.splice(index, 1);
      return true;
    },

    bindElement: function(element) {
      const id = element.getAttribute('data-webui-state');
      if (!id) return;
      if (!elements.has(id)) elements.set(id, []);
      elements.get(id).push(element);

      const tag = element.tagName.toLowerCase();
      if (tag === 'input' || tag === 'select' || tag === 'textarea') {
        const eventName = element.type === 'checkbox' || tag === 'select' ? 'change' : 'input';
        element.addEventListener(eventName, function() {
          const value = element.type === 'checkbox' ? element.checked : element.value;
          manager.setState(id, value);
        });
      }

      if (states.has(id)) {
        this.updateElementProperty(element, states.get(id));
      }
    },

    updateDOM: function(id, value) {
      const bound = elements.get(id) || [];
      for (const element of bound) {
        this.updateElementProperty(element, value);
      }
    },

    updateElementProperty: function(element, value) {
      const tag = element.tagName.toLowerCase();
      if (tag === 'input' && element.type === 'checkbox') {
        element.checked = Boolean(value);
      } else if (tag === 'input' || tag === 'select' || tag === 'textarea') {
        element.value = value === undefined || value === null ? '' : value;
      } else {
        element.textContent = value === undefined || value === null ? '' : String(value);
      }
    },

    notifyListeners: function(id, value) {
      const callbacks = (listeners.get(id) || []).slice();
      for (const callback of callbacks) {
        try {
          callback(value);
        } catch (error) {
          console.error('WebUI: listener failed for', id, error);
        }
      }
    },

    setupServerSync: function(url) {
      if (typeof WebSocket === 'undefined') return null;
      socket = new WebSocket(url);
      socket.onopen = function() {
        console.debug('WebUI: server sync connected', url);
      };
      socket.onmessage = function(event) {
        try {
          const message = JSON.parse(event.data);
          if (message.type === 'stateUpdate') {
            manager.setState(message.stateId, message.value);
          } else if (message.type === 'reload') {
            window.location.reload();
          }
        } catch (error) {
          console.error('WebUI: failed to process server message', error);
        }
      };
      socket.onerror = function(error) {
        console.error('WebUI: server sync error', error);
      };
      socket.onclose = function() {
        console.debug('WebUI: server sync closed');
        socket = null;
      };
      return socket;
    },

    snapshot: function() {
      return Object.fromEntries(states);
    },

    history: function() {
      return history.slice();
    },

    debug: function() {}
  };

  return manager;
})();
"#;
