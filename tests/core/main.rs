mod format_output_path;
mod patch_document;
