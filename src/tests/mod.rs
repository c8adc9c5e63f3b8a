mod notes_create;
mod notes_list;
