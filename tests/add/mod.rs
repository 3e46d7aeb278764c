mod add_directory_expands_to_nested_files;
mod add_identical_contents_stores_one_blob;
mod add_modified_file_updates_entry_in_place;
mod add_outside_repository_fails;
mod add_single_file_to_index_successfully;
mod add_symlink_is_staged_under_its_own_path;
