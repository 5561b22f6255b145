mod shortcut;
